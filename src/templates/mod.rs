//! Template file contents

/// Path of the generated initializer, relative to the project root
pub const INITIALIZER_PATH: &str = "config/initializers/inertia.rb";

/// Baseline `InertiaRails` initializer
///
/// Every option ships commented out so the framework's own defaults apply
/// until the user opts in. The text is a fixed byte-for-byte contract with
/// the framework's config loader; keep edits out of this constant unless the
/// upstream option set changes.
pub const INERTIA_INITIALIZER: &str = r#"# frozen_string_literal: true

InertiaRails.configure do |config|
  # Asset version used for automatic full-page refreshes when it changes.
  # config.version = ViteRuby.digest

  # Flash message keys shared with the frontend on every response.
  # config.flash_keys = [:notice, :alert]

  # Deep-merge shared data into page props instead of a shallow merge.
  # config.deep_merge_shared_data = false

  # Encrypt the browser history state.
  # config.encrypt_history = false

  # Server-side rendering.
  # config.ssr_enabled = false
  # config.ssr_url = "http://localhost:13714"
end
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializer_covers_all_recognized_options() {
        for key in [
            "config.version",
            "config.flash_keys",
            "config.deep_merge_shared_data",
            "config.encrypt_history",
            "config.ssr_enabled",
            "config.ssr_url",
        ] {
            assert!(
                INERTIA_INITIALIZER.contains(key),
                "initializer should mention {key}"
            );
        }
    }

    #[test]
    fn initializer_options_are_commented_out() {
        for line in INERTIA_INITIALIZER.lines() {
            if line.trim_start().starts_with("config.") {
                panic!("option must ship commented out: {line}");
            }
        }
    }

    #[test]
    fn initializer_is_a_configure_block() {
        assert!(INERTIA_INITIALIZER.contains("InertiaRails.configure do |config|"));
        assert!(INERTIA_INITIALIZER.trim_end().ends_with("end"));
    }
}
