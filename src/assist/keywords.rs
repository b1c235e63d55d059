// src/assist/keywords.rs
use crate::editor::Language;

pub const CSHARP: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub const VISUAL_BASIC: &[&str] = &[
    "AddHandler", "AddressOf", "Alias", "And", "AndAlso", "As", "Boolean", "ByRef", "Byte",
    "ByVal", "Call", "Case", "Catch", "CBool", "CByte", "CChar", "CDate", "CDec", "CDbl",
    "Char", "CInt", "Class", "CLng", "CObj", "Const", "Continue", "CSByte", "CShort", "CSng",
    "CStr", "CType", "CUInt", "CULng", "CUShort", "Date", "Decimal", "Declare", "Default",
    "Delegate", "Dim", "DirectCast", "Do", "Double", "Each", "Else", "ElseIf", "End", "EndIf",
    "Enum", "Erase", "Error", "Event", "Exit", "False", "Finally", "For", "Friend", "Function",
    "Get", "GetType", "GetXMLNamespace", "Global", "GoSub", "GoTo", "Handles", "If",
    "Implements", "Imports", "In", "Inherits", "Integer", "Interface", "Is", "IsNot", "Let",
    "Lib", "Like", "Long", "Loop", "Me", "Mod", "Module", "MustInherit", "MustOverride",
    "MyBase", "MyClass", "Namespace", "Narrowing", "New", "Next", "Not", "Nothing",
    "NotInheritable", "NotOverridable", "Object", "Of", "On", "Operator", "Option", "Optional",
    "Or", "OrElse", "Out", "Overloads", "Overridable", "Overrides", "ParamArray", "Partial",
    "Private", "Property", "Protected", "Public", "RaiseEvent", "ReadOnly", "ReDim", "REM",
    "RemoveHandler", "Resume", "Return", "SByte", "Select", "Set", "Shadows", "Shared", "Short",
    "Single", "Static", "Step", "Stop", "String", "Structure", "Sub", "SyncLock", "Then",
    "Throw", "To", "True", "Try", "TryCast", "TypeOf", "UInteger", "ULong", "Unit", "Until",
    "UShort", "Using", "Variant", "Wend", "When", "While", "Widening", "With", "WithEvents",
    "WriteOnly", "Xor",
];

pub const RUST: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

/// Keyword list for a language, in declaration order.
pub fn keywords(language: Language) -> &'static [&'static str] {
    match language {
        Language::CSharp => CSHARP,
        Language::VisualBasic => VISUAL_BASIC,
        Language::Rust => RUST,
    }
}
