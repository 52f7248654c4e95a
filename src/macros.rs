macro_rules! impl_to_perf_string_on_to_string {
    ($($t:ty), *) => {
        $(
            impl ToPerfString for $t {
                fn to_perf_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

/// Builds `label=field;field;...` from values implementing `ToPerfString`. Empty trailing fields
/// are dropped, empty fields in between are kept so positions stay intact.
macro_rules! perf_string {
    ($label:expr, $( $field:expr ), *) => {
        {
            let mut s = String::new();
            s.push_str(&format!("{}=", $label));
            $(
                s.push_str(&$field.to_perf_string());
                s.push(';');
            )*
            s.trim_end_matches(';').to_string()
        }
    };
}
