mod episodes;
mod remote;

pub use episodes::EpisodesView;
pub use remote::RemoteView;
