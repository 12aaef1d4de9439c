mod components;
mod view;

pub use view::PlayView;
#[cfg(test)]
pub(crate) use view::PlayTestHandles;
