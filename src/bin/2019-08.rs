//! 2019 Day 8: Space Image Format

const WIDTH: usize = 25;
const HEIGHT: usize = 6;

fn layers(input: &str, width: usize, height: usize) -> Option<Vec<&[u8]>> {
    let pixels = input.trim().as_bytes();
    let size = width * height;
    if size == 0 || pixels.is_empty() || pixels.len() % size != 0 {
        return None;
    }
    Some(pixels.chunks(size).collect())
}

fn checksum(input: &str, width: usize, height: usize) -> Option<usize> {
    let count = |layer: &[u8], digit| layer.iter().filter(|&&p| p == digit).count();
    let layer = layers(input, width, height)?
        .into_iter()
        .min_by_key(|layer| count(*layer, b'0'))?;
    Some(count(layer, b'1') * count(layer, b'2'))
}

/// Stacks the layers, where `2` is transparent, and draws the result.
fn decode(input: &str, width: usize, height: usize) -> Option<String> {
    let layers = layers(input, width, height)?;
    let mut image = vec![b'2'; width * height];
    for layer in layers.iter().rev() {
        for (pixel, &p) in image.iter_mut().zip(layer.iter()) {
            if p != b'2' {
                *pixel = p;
            }
        }
    }

    let rows: Vec<String> = image
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|&p| if p == b'1' { '#' } else { '.' })
                .collect()
        })
        .collect();
    Some(rows.join("\n"))
}

pub fn part_one(input: &str) -> Option<usize> {
    checksum(input, WIDTH, HEIGHT)
}

pub fn part_two(input: &str) -> Option<String> {
    decode(input, WIDTH, HEIGHT)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 8);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert_eq!(checksum("123456789012", 3, 2), Some(1));
        assert_eq!(checksum("100012220111", 3, 2), Some(6));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(
            decode("0222112222120000", 2, 2).as_deref(),
            Some(".#\n#.")
        );
    }

    #[test]
    fn truncated_layer() {
        assert_eq!(checksum("1234567", 3, 2), None);
    }
}
