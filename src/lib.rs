//! Portfolio assistant: conversational widget core backed by a hosted LLM.

pub mod assistant;
pub mod error;
pub mod llm;

#[cfg(test)]
pub(crate) mod test_support;
