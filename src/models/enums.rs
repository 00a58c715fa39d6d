use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err($crate::models::ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

pub(crate) use str_enum;

str_enum!(
    /// Closed set of document kinds held in the vault.
    DocumentType {
        Lab => "lab",
        Prescription => "prescription",
        Report => "report",
        Scan => "scan",
    }
);

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Lab,
        DocumentType::Prescription,
        DocumentType::Report,
        DocumentType::Scan,
    ];

    /// Human-readable label shown on cards and type badges.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Lab => "Lab Results",
            DocumentType::Prescription => "Prescription",
            DocumentType::Report => "Medical Report",
            DocumentType::Scan => "Medical Scan",
        }
    }
}

str_enum!(SortField {
    Date => "date",
    Title => "title",
    Doctor => "doctor",
});

str_enum!(SortOrder {
    Asc => "asc",
    Desc => "desc",
});

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}
