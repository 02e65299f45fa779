mod mongo_property_repository;

pub use mongo_property_repository::MongoPropertyRepository;
