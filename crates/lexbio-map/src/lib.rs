#![deny(unsafe_code)]

pub mod alignment;
pub mod engine;
pub mod flatten;
pub mod labels;
pub mod overrides;

pub use alignment::{Alignment, AlignmentRow, ClassAlignment, ExtensionRow, align, term_for_field};
pub use engine::{compute_global_stats, compute_model_stats, field_count};
pub use flatten::flat_properties;
pub use labels::{constraints_label, type_label};
pub use overrides::{aligned_term_name, gbif_status, is_protocol_field};
