/// Extension rule for reading a 1D signal outside `[0, len)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderMode<T> {
    Clamp,
    Constant(T),
    Reflect101,
}

impl<T: Copy> BorderMode<T> {
    /// Value of `signal` at a possibly out-of-range index.
    ///
    /// Returns `None` only for an empty signal with a non-constant mode.
    pub fn sample(&self, signal: &[T], i: isize) -> Option<T> {
        if let BorderMode::Constant(c) = self {
            if i < 0 || i as usize >= signal.len() {
                return Some(*c);
            }
            return Some(signal[i as usize]);
        }
        map_index(i, signal.len(), self).map(|idx| signal[idx])
    }
}

pub fn map_index<T>(i: isize, len: usize, mode: &BorderMode<T>) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match mode {
        BorderMode::Constant(_) => {
            if i < 0 || i as usize >= len {
                None
            } else {
                Some(i as usize)
            }
        }
        BorderMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some((i as usize).min(len - 1))
            }
        }
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len { Some(r) } else { Some(period as usize - r) }
        }
    }
}
