// ABOUTME: Shared test support for integration tests
// ABOUTME: Stub PlanCompute collaborator with call counting and request capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planilha Project

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use planilha_compute::{ComputeError, ComputeRequest, ComputeResponse, PlanCompute};
use planilha_core::Plan;

/// What the stub answers with.
pub enum StubBehavior {
    Succeed(ComputeResponse),
    Reject { status: u16, message: Option<String> },
}

/// In-memory stand-in for the remote compute service.
pub struct StubCompute {
    behavior: StubBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<serde_json::Value>>,
}

impl StubCompute {
    pub fn succeeding(response: ComputeResponse) -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::Succeed(response),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn rejecting(status: u16, message: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::Reject {
                status,
                message: message.map(ToOwned::to_owned),
            },
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanCompute for StubCompute {
    async fn compute(&self, request: &ComputeRequest) -> Result<ComputeResponse, ComputeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(serde_json::to_value(request).unwrap());
        match &self.behavior {
            StubBehavior::Succeed(response) => Ok(response.clone()),
            StubBehavior::Reject { status, message } => Err(ComputeError::Rejected {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// A two-week plan in the bare response shape the older service emits.
pub fn two_week_plan() -> Plan {
    serde_json::from_str(
        r#"{
            "Semana 2": [
                {"type": "Longo", "date": "15/08", "activities": [
                    {"description": "Correr", "distance": "12.0km", "intensity": "Livre"}
                ]}
            ],
            "Semana 1": [
                {"type": "Regenerativo", "date": "08/08", "activities": [
                    {"description": "Correr", "distance": "7.0km", "intensity": "Leve"}
                ]}
            ]
        }"#,
    )
    .unwrap()
}

/// A compute response wrapping [`two_week_plan`] in the newer envelope.
pub fn two_week_response() -> ComputeResponse {
    ComputeResponse {
        plan: two_week_plan(),
        pace: Some("5:06 min/km".to_owned()),
        base_distance: Some("10.0 km".to_owned()),
    }
}
