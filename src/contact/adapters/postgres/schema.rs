//! Diesel schema for contact message persistence.

diesel::table! {
    /// Contact form submissions.
    contact_messages (id) {
        /// Store-generated identifier.
        id -> Uuid,
        /// Sender name.
        name -> Text,
        /// Sender email address.
        email -> Text,
        /// Subject line.
        subject -> Text,
        /// Message body.
        message -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
