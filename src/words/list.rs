//! Bundled word list.

/// Default pool of secret words.
///
/// All lowercase ASCII, three letters or longer, so every game over this list
/// is winnable under the guess contract.
pub const DEFAULT_WORDS: &[&str] = &[
    "anchor", "apple", "autumn", "banana", "basket", "bridge", "butter",
    "candle", "carpet", "castle", "cherry", "circle", "copper", "cotton",
    "dragon", "eleven", "engine", "falcon", "forest", "garden", "giraffe",
    "hammer", "harbor", "island", "jungle", "kitten", "ladder", "lantern",
    "marble", "meadow", "mirror", "needle", "orange", "pencil", "pepper",
    "pillow", "planet", "pocket", "rabbit", "ribbon", "rocket", "saddle",
    "shadow", "silver", "spider", "stream", "summer", "temple", "thunder",
    "tunnel", "turtle", "violet", "walnut", "window", "winter", "yellow",
];
