mod home;
pub(crate) mod play;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use play::PlayView;
