// Literal seed data, one set per catalog variant

use super::record::{Item, Product, User};

const ORANGE_IMAGE_URL: &str = "https://images.unsplash.com/photo-1557800636-894a64c1696f?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxzZWFyY2h8Mnx8b3JhbmdlfGVufDB8fDB8fHww";

pub fn items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Sample Item 1".to_string(),
        },
        Item {
            id: 2,
            name: "Sample Item 2".to_string(),
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![Product {
        id: 1,
        title: "Orange".to_string(),
        description: "Very Sweet fruit".to_string(),
        price: 100.0,
        img_url: ORANGE_IMAGE_URL.to_string(),
    }]
}

pub fn users() -> Vec<User> {
    vec![
        user(1, "John Doe", "john@example.com"),
        user(2, "Jane Smith", "jane@example.com"),
    ]
}

fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        active: true,
        created: "2025-09-01".to_string(),
    }
}
