pub mod data_stores;
pub mod mock_authenticator;
pub mod mock_payment_gateway;
