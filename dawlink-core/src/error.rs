/// A notification that could not be applied to the mirror.
///
/// Every variant is recovered at line granularity: the dispatcher logs it
/// and moves on to the next notification.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// Unknown category or leaf command.
    Routing { address: String },
    /// The payload failed a required parse.
    Coercion {
        address: String,
        value: Option<String>,
        reason: String,
    },
    /// A composite value had the wrong number of components.
    Arity {
        address: String,
        components: Vec<String>,
    },
}

impl DispatchError {
    pub fn address(&self) -> &str {
        match self {
            Self::Routing { address }
            | Self::Coercion { address, .. }
            | Self::Arity { address, .. } => address,
        }
    }
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Routing { address } => write!(f, "Unhandled OSC address: {}", address),
            Self::Coercion {
                address,
                value,
                reason,
            } => write!(
                f,
                "Bad value {} for {}: {}",
                value.as_deref().map_or("<none>".to_string(), |v| format!("'{}'", v)),
                address,
                reason
            ),
            Self::Arity {
                address,
                components,
            } => write!(
                f,
                "Wrong number of components ({}) for {}: {:?}",
                components.len(),
                address,
                components
            ),
        }
    }
}

impl std::error::Error for DispatchError {}
