//! Common test utilities for Laminate integration tests.
//!
//! This module provides:
//! - `OpLog` + recording layers/serializer for asserting call order
//! - `Person`: a small serde entity used across round-trip tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use laminate::{FnLayer, Layer, SerializationError, Serializer};
use serde::{Deserialize, Serialize};

/// Shared call log the recording fixtures append to
pub type OpLog = Arc<Mutex<Vec<String>>>;

pub fn op_log() -> OpLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &OpLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Layer that records its calls and passes values through untouched
pub struct RecordingLayer {
    tag: &'static str,
    log: OpLog,
}

impl RecordingLayer {
    pub fn new(tag: &'static str, log: &OpLog) -> Self {
        Self {
            tag,
            log: Arc::clone(log),
        }
    }
}

impl Layer<String> for RecordingLayer {
    fn forward(&self, value: String) -> Result<String, laminate::TransformError> {
        self.log.lock().unwrap().push(format!("forward({})", self.tag));
        Ok(value)
    }

    fn inverse(&self, value: String) -> Result<String, laminate::TransformError> {
        self.log.lock().unwrap().push(format!("inverse({})", self.tag));
        Ok(value)
    }
}

/// Identity serializer that records its calls
pub struct RecordingSerializer {
    log: OpLog,
}

impl RecordingSerializer {
    pub fn new(log: &OpLog) -> Self {
        Self {
            log: Arc::clone(log),
        }
    }
}

impl Serializer<String, String> for RecordingSerializer {
    fn serialize(&self, entity: String) -> Result<String, SerializationError> {
        self.log.lock().unwrap().push("serialize".to_string());
        Ok(entity)
    }

    fn deserialize(&self, stored: String) -> Result<String, SerializationError> {
        self.log.lock().unwrap().push("deserialize".to_string());
        Ok(stored)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Uppercases the person's name on write, lowercases it back on read
pub fn uppercase_name_layer() -> impl Layer<Person> {
    FnLayer::new(
        |mut person: Person| {
            person.name = person.name.to_uppercase();
            Ok(person)
        },
        |mut person: Person| {
            person.name = person.name.to_lowercase();
            Ok(person)
        },
    )
}
