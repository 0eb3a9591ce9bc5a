// src/bin/seed.rs
// Seeds a running openstay-api instance with sample data through its HTTP API.
// Usage: start the server, then `cargo run --bin seed`.

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::env;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// The one field we need back from every created entity
#[derive(Debug, Deserialize)]
struct Created {
    id: String,
}

struct Seeder {
    client: Client,
    base_url: String,
}

impl Seeder {
    async fn post(&self, path: &str, body: Value) -> Result<Created> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {} failed to send", url))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            bail!("POST {} returned {}: {}", url, status, text);
        }

        resp.json::<Created>()
            .await
            .with_context(|| format!("POST {} returned an unexpected body", url))
    }

    async fn state(&self, name: &str) -> Result<Created> {
        self.post("/states", json!({ "name": name })).await
    }

    async fn city(&self, state_id: &str, name: &str) -> Result<Created> {
        self.post(&format!("/states/{}/cities", state_id), json!({ "name": name }))
            .await
    }

    async fn amenity(&self, name: &str) -> Result<Created> {
        self.post("/amenities", json!({ "name": name })).await
    }

    async fn user(&self, email: &str, first_name: &str) -> Result<Created> {
        self.post(
            "/users",
            json!({ "email": email, "password": "changeme", "first_name": first_name }),
        )
        .await
    }

    async fn place(
        &self,
        city_id: &str,
        user_id: &str,
        name: &str,
        price: i32,
        amenity_ids: &[&str],
    ) -> Result<Created> {
        let place = self
            .post(
                &format!("/cities/{}/places", city_id),
                json!({
                    "user_id": user_id,
                    "name": name,
                    "price_by_night": price,
                    "max_guest": 4,
                    "number_rooms": 2,
                    "number_bathrooms": 1
                }),
            )
            .await?;

        for amenity_id in amenity_ids {
            self.post(
                &format!("/places/{}/amenities/{}", place.id, amenity_id),
                json!({}),
            )
            .await?;
        }

        Ok(place)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url =
        env::var("API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000/api/v1".to_string());

    println!("{}{}Seeding openstay-api at {}{}", BOLD, CYAN, base_url, RESET);

    let seeder = Seeder {
        client: Client::new(),
        base_url,
    };

    let california = seeder.state("California").await?;
    let new_york = seeder.state("New York").await?;

    let sf = seeder.city(&california.id, "San Francisco").await?;
    let la = seeder.city(&california.id, "Los Angeles").await?;
    let nyc = seeder.city(&new_york.id, "New York City").await?;

    let wifi = seeder.amenity("wifi").await?;
    let pool = seeder.amenity("pool").await?;
    let kitchen = seeder.amenity("kitchen").await?;

    let alice = seeder.user("alice@example.com", "Alice").await?;
    let bob = seeder.user("bob@example.com", "Bob").await?;

    seeder
        .place(&sf.id, &alice.id, "Painted Lady Suite", 240, &[&wifi.id, &kitchen.id])
        .await?;
    seeder
        .place(&la.id, &alice.id, "Echo Park Loft", 150, &[&wifi.id, &pool.id])
        .await?;
    seeder
        .place(&nyc.id, &bob.id, "Brooklyn Walkup", 120, &[&wifi.id])
        .await?;

    // Show the resulting object counts
    let stats: Value = seeder
        .client
        .get(format!("{}/stats", seeder.base_url))
        .send()
        .await?
        .json()
        .await?;

    println!("{}{}Done.{} Current stats: {}", BOLD, GREEN, RESET, stats);
    Ok(())
}
