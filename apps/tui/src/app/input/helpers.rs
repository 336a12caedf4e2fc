/// Cursor step with wrap-around; empty lists pin the cursor at zero.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    match len {
        0 => 0,
        _ if index == 0 => len - 1,
        _ => index - 1,
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_wrap_at_both_ends() {
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_decrement(2, 3), 1);
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_increment(0, 3), 1);
    }

    #[test]
    fn empty_lists_keep_the_cursor_at_zero() {
        assert_eq!(wrap_decrement(0, 0), 0);
        assert_eq!(wrap_increment(0, 0), 0);
    }
}
