mod plot1d;
mod sink_mock;

pub use plot1d::Plot1D;
pub use sink_mock::SinkMock;
