//! Core types shared across the catalog, client and plugin layers

mod tool;

pub use tool::{
    InvocationResult, ResultEnvelope, ToolCallRequest, ToolCallResponse, ToolDescriptor,
};
