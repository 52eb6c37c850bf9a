use crate::NewUser;

#[test]
fn test_new_user_new() {
    let new_user = NewUser::new("mahfuz".to_string(), "mahfuz@endecoder.com".to_string());

    assert_eq!(new_user.username, "mahfuz");
    assert_eq!(new_user.email, "mahfuz@endecoder.com");
    assert!(new_user.active);
}
