#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Pattern::Regex($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! phrases {
    ($($phrase:literal),+ $(,)?) => {
        $crate::Pattern::Phrases(&[ $($phrase),+ ])
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        field: $field:expr,
        pattern: $pat:expr
        $(, modes: $modes:expr)?
        $(, buckets: $buckets:expr)?
        $(, latest_wins: $latest:expr)?
        , prod: |$groups_expr:ident : &[$grp_ty_expr:ty]| -> $ret_ty:ty $body_expr:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            field: $field,
            pattern: $pat,
            production: Box::new(move |$groups_expr: &[$grp_ty_expr]| {
                use $crate::IntoEvidence;
                let result: $ret_ty = $body_expr;
                result.and_then(|v| v.into_evidence())
            }),
            modes: { 0 $(| $modes)? },
            buckets: { 0 $(| $buckets)? },
            latest_wins: { false $(|| $latest)? },
        }
    }};
}
