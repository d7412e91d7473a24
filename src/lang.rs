/// Default English messages, one per built-in rule.
///
/// `:` placeholders are prettified, `%` placeholders are inserted verbatim and
/// `!is|are` picks the plural form for attributes ending in a wildcard.
pub static ENGLISH: &[(&str, &str)] = &[
    // Presence
    ("present", ":attribute must be present"),
    ("required", ":attribute !is|are required"),
    ("required-if", ":attribute !is|are required if :field equals %value"),
    ("required-with", ":attribute !is|are required when :field is present"),
    ("required-with-all", ":attribute !is|are required"),
    ("required-with-any", ":attribute !is|are required"),
    ("required-without", ":attribute !is|are required when :field is not present"),
    // Equality
    ("equals", ":attribute must equal :field"),
    ("not-equals", ":attribute must not equal :field"),
    ("identical", ":attribute must be identical to :field"),
    ("not-identical", ":attribute must not be identical to :field"),
    // Membership and counts
    ("in", ":attribute must be one of: %values"),
    ("not-in", ":attribute must not be one of: %values"),
    ("contains", ":attribute must contain: %values"),
    ("contains-only", ":attribute must only contain: %values"),
    ("min-arr-count", ":attribute must contain at least %min item(s)"),
    ("max-arr-count", ":attribute must contain at most %max item(s)"),
    // Numeric bounds and ordering
    ("min", ":attribute must be at least %min"),
    ("max", ":attribute must be at most %max"),
    ("greater-than", ":attribute must be greater than :field"),
    ("less-than", ":attribute must be less than :field"),
    // Characters and lengths
    ("alpha", ":attribute must only contain alpha characters"),
    ("alpha-numeric", ":attribute must only contain alpha-numeric characters"),
    ("min-str-len", ":attribute must be at least %min character(s) long"),
    ("max-str-len", ":attribute must be at most %max character(s) long"),
    ("str-len", ":attribute must be exactly %length character(s) long"),
    ("human-name", ":attribute must be a valid name"),
    // Types
    ("is", ":attribute must be a type of %type"),
    // Formats
    ("email", ":attribute must be an email address"),
    ("date", ":attribute must be a date in the format: %format"),
    ("url", ":attribute must be a valid URL"),
    ("uuid", ":attribute must be a valid UUID"),
    ("card-number", ":attribute must be a valid card number"),
    ("regex", ":attribute is not in a valid format"),
    ("not-regex", ":attribute is not in a valid format"),
];
