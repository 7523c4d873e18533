//! Import of Figma REST API node JSON.
//!
//! This module provides:
//! - [`design_element_from_figma`] - Node to [`DesignElement`] mapping
//! - [`design_elements_from_figma_json`] - Entry point accepting a bare node
//!   or a `/nodes` endpoint response
//! - API types for parsing Figma JSON responses

pub mod api_types;
pub mod conversion;


pub use api_types::{
    FigmaBoundingBox, FigmaColor, FigmaNodeData, FigmaNodeWrapper, FigmaNodesResponse,
    FigmaPaintData, FigmaTypeStyle,
};
pub use conversion::design_element_from_figma;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::types::DesignElement;
use crate::{BrandError, Result};

/// Either shape the Figma REST API hands back for node data.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FigmaInput {
    Nodes(FigmaNodesResponse),
    Node(Box<FigmaNodeData>),
}

impl FigmaInput {
    pub fn into_elements(self) -> Vec<DesignElement> {
        match self {
            FigmaInput::Nodes(response) => response
                .nodes
                .values()
                .map(|wrapper| design_element_from_figma(&wrapper.document))
                .collect(),
            FigmaInput::Node(node) => vec![design_element_from_figma(&node)],
        }
    }
}

/// Converts Figma REST JSON into a selection of design elements.
pub fn design_elements_from_figma_json(value: Value) -> Result<Vec<DesignElement>> {
    let input: FigmaInput = serde_json::from_value(value).map_err(|e| {
        BrandError::invalid_input(format!("not a Figma node or /nodes response: {e}"))
    })?;
    let elements = input.into_elements();
    if elements.is_empty() {
        return Err(BrandError::missing_input("Figma response contains no nodes"));
    }
    debug!(count = elements.len(), "imported Figma nodes");
    Ok(elements)
}
