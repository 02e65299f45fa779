use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::application::dto::PropertyFilter;
use crate::application::ports::{PropertyRepository, RepositoryError};
use crate::domain::entities::Property;
use crate::domain::value_objects::PropertyId;

/// Persisted shape of a property record.
#[derive(Debug, Serialize, Deserialize)]
struct PropertyDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    owner_id: String,
    name: String,
    address: String,
    price: f64,
    image_key: String,
}

impl PropertyDocument {
    fn from_entity(property: &Property) -> Self {
        Self {
            id: property.id().map(|id| *id.as_object_id()),
            owner_id: property.owner_id().to_string(),
            name: property.name().to_string(),
            address: property.address().to_string(),
            price: property.price(),
            image_key: property.image_key().to_string(),
        }
    }

    fn into_entity(self) -> Result<Property, RepositoryError> {
        let id = self
            .id
            .ok_or_else(|| RepositoryError::Internal("document missing _id".to_string()))?;

        Ok(Property::reconstruct(
            PropertyId::from_object_id(id),
            self.owner_id,
            self.name,
            self.address,
            self.price,
            self.image_key,
        ))
    }
}

/// Build the query document for the list operation.
///
/// Blank or whitespace-only filter strings impose no constraint; string
/// filters become case-insensitive pattern matches; price bounds are
/// inclusive and AND together with the rest.
fn build_list_filter(filter: &PropertyFilter) -> Document {
    let mut query = Document::new();

    if let Some(name) = filter.name.as_deref().filter(|s| !s.trim().is_empty()) {
        query.insert("name", doc! { "$regex": name, "$options": "i" });
    }
    if let Some(address) = filter.address.as_deref().filter(|s| !s.trim().is_empty()) {
        query.insert("address", doc! { "$regex": address, "$options": "i" });
    }

    let mut price = Document::new();
    if let Some(min) = filter.min_price {
        price.insert("$gte", min);
    }
    if let Some(max) = filter.max_price {
        price.insert("$lte", max);
    }
    if !price.is_empty() {
        query.insert("price", price);
    }

    query
}

/// MongoDB adapter for [`PropertyRepository`].
pub struct MongoPropertyRepository {
    collection: Collection<PropertyDocument>,
}

impl MongoPropertyRepository {
    /// The database handle is constructed by the caller and injected; the
    /// repository never reaches for a global client.
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection::<PropertyDocument>(collection_name),
        }
    }
}

#[async_trait]
impl PropertyRepository for MongoPropertyRepository {
    async fn list(&self, filter: &PropertyFilter) -> Result<Vec<Property>, RepositoryError> {
        let cursor = self.collection.find(build_list_filter(filter)).await?;
        let documents: Vec<PropertyDocument> = cursor.try_collect().await?;

        documents
            .into_iter()
            .map(PropertyDocument::into_entity)
            .collect()
    }

    async fn find_by_id(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
        let document = self
            .collection
            .find_one(doc! { "_id": *id.as_object_id() })
            .await?;

        document.map(PropertyDocument::into_entity).transpose()
    }

    async fn insert(&self, property: &Property) -> Result<PropertyId, RepositoryError> {
        let result = self
            .collection
            .insert_one(PropertyDocument::from_entity(property))
            .await?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(PropertyId::from_object_id(oid)),
            other => Err(RepositoryError::Internal(format!(
                "unexpected inserted_id: {}",
                other
            ))),
        }
    }

    async fn delete(&self, id: &PropertyId) -> Result<bool, RepositoryError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id.as_object_id() })
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn exists_by_name_and_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<bool, RepositoryError> {
        let found = self
            .collection
            .find_one(doc! { "name": name, "address": address })
            .await?;

        Ok(found.is_some())
    }
}
