// Copyright 2025 AgentReplay (https://github.com/agentreplay)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Opcatalog Core
//!
//! Data model for the operation catalog: operation records, their parameter
//! kinds, the read-only catalog store and the derived category index.

pub mod catalog;
pub mod category;
pub mod definitions;
pub mod error;
pub mod operation;
pub mod service;

#[cfg(test)]
mod catalog_property_tests;

pub use catalog::Catalog;
pub use category::{CategoryIndex, CategorySummary};
pub use definitions::{builtin_operations, builtin_service_info};
pub use error::{CatalogError, Result};
pub use operation::{OperationRecord, ParamKind, Parameter};
pub use service::ServiceInfo;
