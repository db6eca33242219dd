use enigo::Key;
use folio_core::KeyName;

pub(crate) fn to_enigo_key(key: KeyName) -> Key {
    match key {
        KeyName::Right => Key::RightArrow,
        KeyName::Left => Key::LeftArrow,
        KeyName::Up => Key::UpArrow,
        KeyName::Down => Key::DownArrow,
        KeyName::PageDown => Key::PageDown,
        KeyName::PageUp => Key::PageUp,
        KeyName::Space => Key::Space,
        KeyName::Enter => Key::Return,
        KeyName::Tab => Key::Tab,
        KeyName::Home => Key::Home,
        KeyName::End => Key::End,
        KeyName::Char(c) => Key::Unicode(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_arrow_keys() {
        assert_eq!(to_enigo_key(KeyName::Right), Key::RightArrow);
        assert_eq!(to_enigo_key(KeyName::Left), Key::LeftArrow);
        assert_eq!(to_enigo_key(KeyName::Down), Key::DownArrow);
    }

    #[test]
    fn chars_map_to_unicode() {
        assert_eq!(to_enigo_key(KeyName::Char('n')), Key::Unicode('n'));
    }

    #[test]
    fn enter_maps_to_return() {
        assert_eq!(to_enigo_key(KeyName::Enter), Key::Return);
    }
}
