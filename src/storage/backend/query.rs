//! Read operations for SeaOrmStorage

use sea_orm::EntityTrait;
use tracing::error;

use super::SeaOrmStorage;
use crate::errors::{CrclinkError, Result};

use migration::entities::url_record;

impl SeaOrmStorage {
    pub async fn find_url(&self, id: &str) -> Result<String> {
        match url_record::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
        {
            Ok(Some(model)) => Ok(model.url),
            Ok(None) => Err(CrclinkError::not_found(format!("can't find URL: {}", id))),
            Err(e) => {
                error!("Failed to query URL {}: {}", id, e);
                Err(CrclinkError::database_operation(format!("db error: {}", e)))
            }
        }
    }
}
