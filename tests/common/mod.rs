pub mod mock_engine;
pub mod transport;
