//! Embedding external types through the `Serializable` capability.
//!
//! Run with: RUST_LOG=serde_dynjson=trace cargo run --example capability

use serde_dynjson::{
    decode, encode, encode_serializable, Error, Object, Result, Serializable, Value,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// A type the value model knows nothing about.
#[derive(Debug)]
struct Job {
    name: String,
    timeout: Duration,
    retries: u8,
}

impl Serializable for Job {
    fn to_object(&self) -> Result<Object> {
        let mut object = Object::new();
        object.insert("name".to_string(), Value::from(self.name.as_str()));
        object.insert("timeout_ms".to_string(), Value::from(self.timeout.as_millis() as u64));
        object.insert("retries".to_string(), Value::from(self.retries));
        Ok(object)
    }
}

/// Refuses to convert, to show error propagation.
#[derive(Debug)]
struct Secret;

impl Serializable for Secret {
    fn to_object(&self) -> Result<Object> {
        Err(Error::conversion("secrets are not serializable"))
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let job = Job {
        name: "nightly-backup".to_string(),
        timeout: Duration::from_secs(90),
        retries: 3,
    };
    println!("Job alone:   {}", encode_serializable(&job)?);

    let mut queue = Object::new();
    queue.insert("queue".to_string(), Value::from("default"));
    queue.insert(
        "jobs".to_string(),
        Value::Array(vec![Value::serializable(job)]),
    );
    let text = encode(&queue)?;
    println!("Inside a queue: {}", text);

    // Decoding gives plain objects back; rebuilding a Job is up to the caller.
    let decoded = decode(&text)?;
    let first = &decoded["jobs"].as_array().ok_or("jobs is not an array")?[0];
    println!("Decoded job: {}", first);
    println!("Timeout (ms): {:?}", first.as_object().and_then(|o| o["timeout_ms"].as_u64()));

    let mut broken = Object::new();
    broken.insert("secret".to_string(), Value::serializable(Secret));
    match encode(&broken) {
        Ok(text) => println!("unexpected success: {}", text),
        Err(err) => println!("Encoding a secret fails: {}", err),
    }

    Ok(())
}
