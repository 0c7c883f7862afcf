use std::fmt;

/// Error codes for all runtime diagnostics.
///
/// Format: E#### where the first digit indicates the family:
/// - E1xxx: Declaration errors (raised once, at registration)
/// - E2xxx: Construction errors (per associated-variant construction)
/// - E3xxx: Lookup errors (registry and primitive bridge queries)
/// - E4xxx: Dispatch errors (method invocation and match evaluation)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Declaration Errors (E1xxx)
    /// A type with this name is already registered
    E1001,
    /// Two variants share a name
    E1002,
    /// Declaration has no variants
    E1003,
    /// Backed type has a variant without a literal
    E1004,
    /// Unbacked type has a variant with a literal
    E1005,
    /// Literal does not match the declared backing kind
    E1006,
    /// Two variants share a literal
    E1007,
    /// Literal cannot be a backing value (NaN)
    E1008,
    /// Enum type declares fields of its own
    E1009,
    /// Two fields of one variant share a name
    E1010,
    /// A method is declared twice on the same owner
    E1011,
    /// Method signatures differ across variants
    E1012,
    /// A variant lacks a method other variants declare
    E1013,
    /// Declared interface is not registered
    E1014,
    /// A variant does not provide an interface method
    E1015,
    /// Method signature differs from the interface
    E1016,
    /// Variant declares an explicit constructor
    E1017,
    /// Primitive-backed type overrides the string hook
    E1018,
    /// An interface with this name is already registered
    E1019,
    /// Unbacked type mixes unit and associated variants
    E1020,

    // Construction Errors (E2xxx)
    /// Wrong number of field values
    E2001,
    /// Field value has the wrong type
    E2002,
    /// Named argument matches no field
    E2003,
    /// Field given twice by name
    E2004,
    /// Variant carries no fields and is not constructible
    E2005,
    /// Variant carries fields and has no singleton
    E2006,

    // Lookup Errors (E3xxx)
    /// No variant has this literal
    E3001,
    /// Type is not primitive-backed
    E3002,
    /// No type with this name
    E3003,
    /// No variant with this name
    E3004,
    /// Associated-value types cannot be enumerated
    E3005,
    /// Coercion to a primitive of another kind
    E3006,

    // Dispatch Errors (E4xxx)
    /// No variant or shared method with this name
    E4001,
    /// No arm matched and no default was supplied
    E4002,
    /// Wrong number of method arguments
    E4003,
    /// Method argument has the wrong type
    E4004,
    /// Match form does not fit the value
    E4005,
    /// Nested invocation exceeded the depth limit
    E4006,
    /// Method body reported a failure
    E4007,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Declaration
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E1017 => "E1017",
            ErrorCode::E1018 => "E1018",
            ErrorCode::E1019 => "E1019",
            ErrorCode::E1020 => "E1020",
            // Construction
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            // Lookup
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            // Dispatch
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            ErrorCode::E4004 => "E4004",
            ErrorCode::E4005 => "E4005",
            ErrorCode::E4006 => "E4006",
            ErrorCode::E4007 => "E4007",
        }
    }

    /// Check if this is a declaration error (E1xxx range).
    pub fn is_declaration_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a construction error (E2xxx range).
    pub fn is_construction_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a lookup error (E3xxx range).
    pub fn is_lookup_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    /// Check if this is a dispatch error (E4xxx range).
    pub fn is_dispatch_error(&self) -> bool {
        self.as_str().starts_with("E4")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
