use users_core::NewUser;

/// Creates a test NewUser with sensible defaults
pub fn create_test_new_user() -> NewUser {
    NewUser::new("mahfuz".to_string(), "mahfuz@endecoder.com".to_string())
}

/// Creates a test NewUser with a specific username and email
pub fn create_test_new_user_with_email(username: &str, email: &str) -> NewUser {
    NewUser::new(username.to_string(), email.to_string())
}
