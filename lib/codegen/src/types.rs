//! Type mapping table: CUBA datatype identifiers → emitted C# primitives.

/// Target-language primitive types the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimitiveType {
    String,
    Int,
    Long,
    Double,
    Decimal,
    Bool,
    DateTime,
    TimeSpan,
    Guid,
    ByteArray,
}

impl PrimitiveType {
    /// The C# spelling of this primitive.
    pub fn csharp_name(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Double => "double",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::Bool => "bool",
            PrimitiveType::DateTime => "DateTime",
            PrimitiveType::TimeSpan => "TimeSpan",
            PrimitiveType::Guid => "Guid",
            PrimitiveType::ByteArray => "byte[]",
        }
    }
}

/// Look up the emitted type for a raw datatype identifier.
///
/// `None` means the identifier is unmapped; per the documented generator
/// behavior the field is then omitted from output, not rejected.
pub fn map_datatype(raw: &str) -> Option<PrimitiveType> {
    let ty = match raw {
        "string" => PrimitiveType::String,
        "int" => PrimitiveType::Int,
        "long" => PrimitiveType::Long,
        "double" => PrimitiveType::Double,
        "decimal" => PrimitiveType::Decimal,
        "boolean" => PrimitiveType::Bool,
        "date" | "dateTime" => PrimitiveType::DateTime,
        "time" => PrimitiveType::TimeSpan,
        "uuid" => PrimitiveType::Guid,
        "byteArray" => PrimitiveType::ByteArray,
        _ => return None,
    };
    Some(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_datatypes_map() {
        assert_eq!(map_datatype("string"), Some(PrimitiveType::String));
        assert_eq!(map_datatype("boolean"), Some(PrimitiveType::Bool));
        assert_eq!(map_datatype("date"), Some(PrimitiveType::DateTime));
        assert_eq!(map_datatype("dateTime"), Some(PrimitiveType::DateTime));
        assert_eq!(map_datatype("uuid"), Some(PrimitiveType::Guid));
        assert_eq!(map_datatype("byteArray"), Some(PrimitiveType::ByteArray));
    }

    #[test]
    fn unknown_datatype_is_none() {
        assert_eq!(map_datatype("localDateTime"), None);
        assert_eq!(map_datatype(""), None);
    }

    #[test]
    fn csharp_names() {
        assert_eq!(PrimitiveType::Bool.csharp_name(), "bool");
        assert_eq!(PrimitiveType::ByteArray.csharp_name(), "byte[]");
        assert_eq!(PrimitiveType::DateTime.csharp_name(), "DateTime");
    }
}
