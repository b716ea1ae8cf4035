//! Hand-written declarations for database views.
//!
//! `diesel print-schema` does not emit views, so they live here. Views are
//! read-only; nothing in this crate inserts into them.

diesel::table! {
    /// `honors` left-joined to `honor_groups` on `(server, group_id)`.
    v_honors_with_group (id) {
        id -> Int4,
        #[max_length = 10]
        server -> Varchar,
        honor_id -> Int4,
        seq -> Nullable<Int4>,
        group_id -> Nullable<Int4>,
        honor_group_name -> Nullable<Text>,
        #[max_length = 20]
        honor_rarity -> Nullable<Varchar>,
        name -> Text,
        #[max_length = 255]
        asset_bundle_name -> Nullable<Varchar>,
        levels -> Jsonb,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        group_name -> Nullable<Text>,
        #[max_length = 50]
        honor_type -> Nullable<Varchar>,
        #[max_length = 255]
        group_background_asset_bundle_name -> Nullable<Varchar>,
    }
}
