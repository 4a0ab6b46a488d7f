use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{error::Result, Collection, Database};

use crate::models::UserDoc;

const COLLECTION: &str = "users";

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: String,
}

fn collection(db: &Database) -> Collection<UserDoc> {
    db.collection::<UserDoc>(COLLECTION)
}

pub async fn get_by_id(db: &Database, id: ObjectId) -> Result<Option<UserDoc>> {
    collection(db).find_one(doc! { "_id": id }).await
}

pub async fn get_by_email(db: &Database, email: &str) -> Result<Option<UserDoc>> {
    collection(db).find_one(doc! { "email": email }).await
}

pub async fn list(db: &Database, limit: i64, offset: u64) -> Result<Vec<UserDoc>> {
    collection(db)
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .skip(offset)
        .limit(limit)
        .await?
        .try_collect()
        .await
}

pub async fn count(db: &Database) -> Result<u64> {
    collection(db).count_documents(doc! {}).await
}

pub async fn delete(db: &Database, id: ObjectId) -> Result<bool> {
    let result = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count > 0)
}

/// Insert a new user document; the id is generated client-side.
pub async fn create(db: &Database, data: CreateUserData) -> Result<UserDoc> {
    let user = UserDoc {
        id: ObjectId::new(),
        email: data.email,
        username: data.username,
        password_hash: data.password_hash,
        role: data.role,
        created_at: Utc::now(),
    };

    collection(db).insert_one(&user).await?;
    Ok(user)
}
