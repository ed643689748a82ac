/*
[INPUT]:  Card credentials and webhook callback bodies
[OUTPUT]: Authorization headers, webhook signature verdicts
[POS]:    Auth layer - handles SPWorlds card authentication
[UPDATE]: When the credential or webhook signing scheme changes
*/

pub mod credentials;
pub mod webhook;

pub use credentials::{Credentials, make_auth_header};
pub use webhook::{
    BODY_HASH_HEADER,
    parse_webhook,
    sign_webhook_body,
    verify_and_parse_webhook,
    verify_webhook,
};
