diesel::table! {
    address (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_address -> Text,
        user_name -> Text,
        city -> Text,
        state -> Text,
        country -> Nullable<Text>,
        postal_code -> Text,
        // Not enforced, i.e. records without a position might exist
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        map_url -> Nullable<Text>,
    }
}
