//! # dom-forms
//!
//! Registration-record validation for DOM. Builds on the identifier checks
//! in `dom-core` and applies them to whole employee ("empregado") and
//! employer ("empregador") records, producing per-field pt-BR messages the
//! way the registration screens display them.
//!
//! ## Layers
//!
//! - [`form`]: record types and their normalized form.
//! - [`rules`]: [`FieldCheck`] and the [`IdentifierKind`] dispatch enum.
//! - [`validate`]: record validators returning [`FieldErrors`].
//! - [`record`]: JSON/YAML record loading.

pub mod error;
pub mod form;
pub mod record;
pub mod rules;
pub mod validate;

pub use error::FormError;
pub use form::{EmpregadoForm, EmpregadorForm, Endereco};
pub use record::{load_record, parse_record, RecordFormat};
pub use rules::{FieldCheck, IdentifierKind};
pub use validate::{validate_empregado, validate_empregador, FieldErrors};
