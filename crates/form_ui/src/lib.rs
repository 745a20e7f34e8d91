//! Shared Leptos primitives for the registration forms.
//!
//! The crate owns the reusable form controls, the confirmation overlay, and
//! the stable `data-ui-*` DOM contract consumed by the styling layer. Form
//! components should compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, CheckboxInput, Cluster, ConfirmationModal, FieldError, FieldRow,
    LayoutGap, SelectInput, Stack, TextInput,
};

/// Convenience imports for form components consuming the primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, CheckboxInput, Cluster, ConfirmationModal, FieldError, FieldRow,
        LayoutGap, SelectInput, Stack, TextInput,
    };
}
