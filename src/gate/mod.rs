// ABOUTME: Gate module - binds conditions to request paths and enforces
// ABOUTME: them, recording every decision through an audit sink.

mod audit;
mod gate;

pub use audit::{AuditRecord, AuditSink, CheckPhase, NoopAudit, TracingAudit};
pub use gate::{Gate, GateBuilder};

#[cfg(test)]
mod gate_test;
