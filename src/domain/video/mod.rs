//! Video domain module

mod video_url;

pub use video_url::VideoUrl;
