//! Field identities, kinds and visual validity state.

/// DOM id of the form container.
pub const FORM_ID: &str = "myForm";
/// DOM id of the element showing CEP lookup errors.
pub const CEP_ERROR_ID: &str = "cep-error";
/// DOM id of the submit control.
pub const SUBMIT_BUTTON_ID: &str = "submitButton";
/// DOM id of the panel showing the stored snapshot.
pub const STORED_DATA_ID: &str = "localStorageData";

/// One of the nine inputs of the form.
///
/// The declaration order is the order used for aggregate validation,
/// snapshot capture and rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Cep,
    Street,
    Complement,
    Neighborhood,
    City,
    State,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Cep,
        FieldId::Street,
        FieldId::Complement,
        FieldId::Neighborhood,
        FieldId::City,
        FieldId::State,
    ];

    /// Snapshot key, which is also the DOM id of the input.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Cep => "cep",
            Self::Street => "street",
            Self::Complement => "complement",
            Self::Neighborhood => "neighborhood",
            Self::City => "city",
            Self::State => "state",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Label used when rendering stored data.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Email => "E-mail",
            Self::Phone => "Telefone",
            Self::Cep => "CEP",
            Self::Street => "Rua",
            Self::Complement => "Complemento",
            Self::Neighborhood => "Bairro",
            Self::City => "Cidade",
            Self::State => "Estado",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Phone => FieldKind::Phone,
            Self::Cep => FieldKind::Cep,
            _ => FieldKind::Text,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Which validator/formatter handles input for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Valid iff non-empty after trimming.
    Text,
    Email,
    Phone,
    Cep,
}

/// Visual validity of a field. Maps to at most one CSS class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Untouched,
    Error,
    Success,
}

impl FieldState {
    pub fn from_validity(is_valid: bool) -> Self {
        if is_valid { Self::Success } else { Self::Error }
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Untouched => None,
            Self::Error => Some("error"),
            Self::Success => Some("success"),
        }
    }
}
