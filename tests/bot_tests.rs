use anyhow::Result;
use keyboards::bot::{create_layout_keyboard, create_menu_keyboard, format_layout_summary};
use keyboards::grid_config::{BotConfig, ReflowOptions, DEFAULT_MENU_COLUMNS};
use keyboards::grid_errors::GridError;
use keyboards::menu::{MenuLayout, MENU_ITEMS};
use teloxide::types::InlineKeyboardButtonKind;

#[cfg(test)]
mod tests {
    use super::*;

    fn row_sizes(keyboard: &keyboards::keyboard::Keyboard) -> Vec<usize> {
        keyboard.grid().rows().iter().map(Vec::len).collect()
    }

    /// Test the menu keyboard is flowed and resized
    #[test]
    fn test_menu_keyboard_layout() -> Result<()> {
        let menu = create_menu_keyboard(MENU_ITEMS, 3, ReflowOptions::default())?;

        assert_eq!(row_sizes(&menu), vec![3, 3, 1]);
        assert!(menu.is_resized());
        assert!(menu.input_field_placeholder().is_some());
        assert_eq!(menu.build()[0][0].text, MENU_ITEMS[0]);
        Ok(())
    }

    /// Test the menu keyboard with a full last row
    #[test]
    fn test_menu_keyboard_fill_last_row() -> Result<()> {
        let menu = create_menu_keyboard(MENU_ITEMS, 3, ReflowOptions::fill_last_row())?;
        assert_eq!(row_sizes(&menu), vec![1, 3, 3]);
        Ok(())
    }

    /// Test every layout button carries parsable callback data
    #[test]
    fn test_layout_keyboard_callbacks_parse() -> Result<()> {
        let controls = create_layout_keyboard()?;
        let rows = controls.build();

        assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 2]);
        for button in rows.iter().flatten() {
            match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => {
                    assert!(MenuLayout::parse(data).is_ok(), "unparsable callback data: {data}");
                }
                other => panic!("Unexpected button kind: {other:?}"),
            }
        }
        Ok(())
    }

    /// Test applying layouts to the menu
    #[test]
    fn test_layouts_reshape_menu() -> Result<()> {
        let base = create_menu_keyboard(MENU_ITEMS, 2, ReflowOptions::default())?;
        assert_eq!(row_sizes(&base), vec![2, 2, 2, 1]);

        assert_eq!(row_sizes(&MenuLayout::Flow(1).apply(&base)?), vec![1; 7]);
        assert_eq!(row_sizes(&MenuLayout::Fill(3).apply(&base)?), vec![1, 3, 3]);
        assert_eq!(row_sizes(&MenuLayout::Transpose.apply(&base)?), vec![4, 3]);

        // The base menu is untouched and keeps its flags through every layout
        assert_eq!(row_sizes(&base), vec![2, 2, 2, 1]);
        assert!(MenuLayout::Transpose.apply(&base)?.is_resized());
        Ok(())
    }

    /// Test the layout summary text
    #[test]
    fn test_format_layout_summary() -> Result<()> {
        let menu = create_menu_keyboard(MENU_ITEMS, 3, ReflowOptions::default())?;
        assert_eq!(format_layout_summary(&menu), "3 rows: 3 + 3 + 1");

        let single = create_menu_keyboard(&["Only"], 3, ReflowOptions::default())?;
        assert_eq!(format_layout_summary(&single), "1 row: 1");
        Ok(())
    }

    /// Test configuration parsing from raw values
    #[test]
    fn test_bot_config_from_values() -> Result<()> {
        let config = BotConfig::from_values("token".to_string(), None, None)?;
        assert_eq!(config.menu_columns, DEFAULT_MENU_COLUMNS);
        assert!(!config.reflow.fill_last_row);

        let config = BotConfig::from_values("token".to_string(), Some(" 4 "), Some("true"))?;
        assert_eq!(config.menu_columns, 4);
        assert!(config.reflow.fill_last_row);

        assert!(BotConfig::from_values("token".to_string(), Some("0"), None).is_err());
        assert!(BotConfig::from_values("token".to_string(), Some("four"), None).is_err());
        assert!(BotConfig::from_values("token".to_string(), None, Some("yes")).is_err());
        Ok(())
    }

    /// Test configuration defaults are usable as-is
    #[test]
    fn test_bot_config_defaults() {
        let config = BotConfig::default();
        assert!(config.menu_columns > 0);
        assert_eq!(config.reflow, ReflowOptions::default());
    }

    /// Test reflow options deserialize with a missing flag
    #[test]
    fn test_reflow_options_serde() -> Result<()> {
        let options: ReflowOptions = serde_json::from_str("{}")?;
        assert_eq!(options, ReflowOptions::default());

        let options: ReflowOptions = serde_json::from_str(r#"{"fill_last_row":true}"#)?;
        assert_eq!(options, ReflowOptions::fill_last_row());
        Ok(())
    }

    /// Test error message formatting
    #[test]
    fn test_error_message_formatting() {
        assert_eq!(
            GridError::ZeroColumns.to_string(),
            "Reflow error: column count must be at least 1"
        );
        assert_eq!(
            GridError::UnknownLayout("spiral".to_string()).to_string(),
            "Unknown layout: spiral"
        );
        assert!(GridError::InvalidUrl("x".to_string())
            .to_string()
            .starts_with("Invalid url"));
    }

    /// Test errors convert into anyhow for handler code
    #[tokio::test]
    async fn test_error_propagates_through_anyhow() -> Result<()> {
        let result: Result<()> = (|| {
            MenuLayout::parse("nope")?;
            Ok(())
        })();
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<GridError>(),
            Some(&GridError::UnknownLayout("nope".to_string()))
        );
        Ok(())
    }
}
