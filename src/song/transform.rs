use crate::midi::MidiError;

const SEMITONES_PER_OCTAVE: i16 = 12;
const HIGHEST_PITCH: i16 = 127;

pub fn reverse(pitches: &[u8]) -> Vec<u8> {
    pitches.iter().rev().copied().collect()
}

/// Shift every pitch by `semitones`, failing if any falls off the keyboard.
pub fn transpose(pitches: &[u8], semitones: i16) -> Result<Vec<u8>, MidiError> {
    pitches
        .iter()
        .map(|&pitch| {
            let Some(shifted) = i16::from(pitch).checked_add(semitones) else {
                return Err(MidiError::PitchOutOfRange(semitones));
            };

            if (0..=HIGHEST_PITCH).contains(&shifted) {
                Ok(shifted as u8)
            } else {
                Err(MidiError::PitchOutOfRange(shifted))
            }
        })
        .collect()
}

pub fn octave_down(pitches: &[u8]) -> Result<Vec<u8>, MidiError> {
    transpose(pitches, -SEMITONES_PER_OCTAVE)
}

pub fn octave_up(pitches: &[u8]) -> Result<Vec<u8>, MidiError> {
    transpose(pitches, SEMITONES_PER_OCTAVE)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reverse_keeps_every_pitch() {
        assert_eq!(reverse(&[60, 64, 67, 68]), vec![68, 67, 64, 60]);
        assert!(reverse(&[]).is_empty());
    }

    #[test]
    fn octave_down_lowers_by_twelve_semitones() {
        assert_eq!(octave_down(&[60, 64, 67, 68]).unwrap(), vec![48, 52, 55, 56]);
    }

    #[test]
    fn octave_up_raises_by_twelve_semitones() {
        assert_eq!(octave_up(&[60, 115]).unwrap(), vec![72, 127]);
    }

    #[test]
    fn transposing_off_the_keyboard_fails() {
        assert_eq!(
            octave_down(&[60, 11]).unwrap_err(),
            MidiError::PitchOutOfRange(-1)
        );
        assert_eq!(
            transpose(&[120], 8).unwrap_err(),
            MidiError::PitchOutOfRange(128)
        );
    }

    #[test]
    fn extreme_shifts_fail_instead_of_overflowing() {
        assert_eq!(
            transpose(&[127], i16::MAX).unwrap_err(),
            MidiError::PitchOutOfRange(i16::MAX)
        );
        assert_eq!(
            transpose(&[0], i16::MIN).unwrap_err(),
            MidiError::PitchOutOfRange(i16::MIN)
        );
        assert_eq!(
            transpose(&[1], i16::MIN).unwrap_err(),
            MidiError::PitchOutOfRange(i16::MIN + 1)
        );
    }
}
