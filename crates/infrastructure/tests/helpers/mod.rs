pub mod mock_transport;
pub mod responses;
