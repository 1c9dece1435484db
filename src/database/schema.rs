diesel::table! {
    athlete (id) {
        id -> Integer,
        first_name -> Text,
        last_name -> Text,
        gender -> Text,
        phone -> Text,
        emergency_phone -> Nullable<Text>,
        father_name -> Nullable<Text>,
        birth_date -> Nullable<Text>,
        registration_date -> Text,
        start_date -> Text,
        original_days -> Integer,
    }
}

diesel::table! {
    attendance_record (id) {
        id -> Integer,
        athlete_id -> Integer,
        check_in_time -> Text,
        check_out_time -> Nullable<Text>,
        date -> Text,
    }
}

diesel::table! {
    activity_log (id) {
        id -> Integer,
        timestamp -> Text,
        action -> Text,
        details -> Text,
        athlete_id -> Nullable<Integer>,
    }
}

diesel::table! {
    admin (id) {
        id -> Integer,
        username -> Text,
        password_hash -> Text,
        first_name -> Text,
        last_name -> Text,
        gender -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(athlete, attendance_record, activity_log, admin);
