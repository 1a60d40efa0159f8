use apitree_core::Document;
use rstest::fixture;
use tracing::info;

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

#[fixture]
pub fn petstore() -> Document {
    init_tracing();
    let input = r#"{
        "openapi": "3.1.0",
        "info": { "title": "Petstore", "version": "1.0.0" },
        "paths": {
            "/pet": {
                "put": { "tags": ["pet"], "operationId": "updatePet" },
                "post": { "tags": ["pet"], "operationId": "addPet" }
            },
            "/pet/findByStatus": {
                "get": { "tags": ["pet"], "operationId": "findPetsByStatus" }
            },
            "/pet/{petId}": {
                "parameters": [{ "name": "petId", "in": "path", "required": true }],
                "get": { "tags": ["pet"], "operationId": "getPetById" },
                "delete": { "tags": ["pet"], "operationId": "deletePet", "deprecated": true }
            },
            "/store/order": {
                "post": { "tags": ["store", "pet"], "operationId": "placeOrder" }
            },
            "/user/login": {
                "get": { "operationId": "loginUser" }
            },
            "/": {
                "summary": "API root",
                "get": { "operationId": "root" }
            }
        },
        "tags": [
            { "name": "pet", "description": "Everything about your Pets" },
            { "name": "store", "description": "Access to Petstore orders" },
            { "name": "user", "description": "Operations about user" }
        ],
        "webhooks": {
            "newPet": { "post": { "operationId": "newPet" } },
            "petDeleted": { "post": { "operationId": "petDeleted", "deprecated": true } }
        }
    }"#;

    match Document::from_json(input) {
        Ok(document) => document,
        Err(error) => {
            panic!("fail to parse petstore document: {error:?}");
        }
    }
}
