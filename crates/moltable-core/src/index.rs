use crate::error::GraphError;

/// Normalizes a possibly negative index into `[0, size)`.
///
/// Negative indices count from the end, so `-1` addresses the last slot
/// of a nonempty container. Indices that remain outside `[0, size)`
/// after normalization fail with [`GraphError::IndexOutOfRange`].
///
/// Every public index parameter of the connectivity and coordinate
/// containers goes through this one helper.
pub fn wrap_index(index: isize, size: usize) -> Result<usize, GraphError> {
    let mut wrapped = index;
    if wrapped < 0 {
        wrapped += size as isize;
    }
    if wrapped < 0 || wrapped as usize >= size {
        return Err(GraphError::IndexOutOfRange { index, size });
    }
    Ok(wrapped as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_indices_pass_through() {
        assert_eq!(wrap_index(0, 4), Ok(0));
        assert_eq!(wrap_index(3, 4), Ok(3));
    }

    #[test]
    fn negative_indices_count_from_the_end() {
        assert_eq!(wrap_index(-1, 4), Ok(3));
        assert_eq!(wrap_index(-4, 4), Ok(0));
    }

    #[test]
    fn size_itself_is_out_of_range() {
        assert_eq!(
            wrap_index(4, 4),
            Err(GraphError::IndexOutOfRange { index: 4, size: 4 })
        );
    }

    #[test]
    fn out_of_range_both_ways_is_rejected() {
        assert_eq!(
            wrap_index(5, 4),
            Err(GraphError::IndexOutOfRange { index: 5, size: 4 })
        );
        assert_eq!(
            wrap_index(-5, 4),
            Err(GraphError::IndexOutOfRange { index: -5, size: 4 })
        );
    }

    #[test]
    fn empty_containers_reject_every_index() {
        assert!(wrap_index(0, 0).is_err());
        assert!(wrap_index(-1, 0).is_err());
    }
}
