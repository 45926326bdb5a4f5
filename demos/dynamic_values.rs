//! Building, encoding and inspecting dynamic values.
//!
//! Run with: RUST_LOG=serde_dynjson=trace cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_dynjson::{decode, dynjson, encode_pretty, from_value, to_value, Value};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = dynjson!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging"],
        "banner": "welcome\n\tto the demo",
        "debug": true
    });

    let object = config.as_object().ok_or("config is not an object")?;
    let text = encode_pretty(object)?;
    println!("Config:\n{}\n", text);

    // Widths are inferred again on the way back in.
    let decoded = decode(&text)?;
    for (key, value) in &decoded {
        let kind = match value {
            Value::Number(n) => n.type_name(),
            other => other.type_name(),
        };
        println!("  {:<9} {:<7} {}", key, kind, value);
    }
    println!(
        "\nport was written as i32 and read back as {:?}",
        decoded["port"].as_number()
    );
    println!(
        "equivalent to the original: {}\n",
        Value::Object(decoded.clone()).equivalent(&config)
    );

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;
    println!("User as text: {}", user_value);

    let back: User = from_value(user_value)?;
    println!("User back:    {:?}", back);

    Ok(())
}
