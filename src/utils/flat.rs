use std::iter::IntoIterator;

pub fn flat<T>(it: impl IntoIterator<Item = impl IntoIterator<Item = T>>) -> Vec<T> {
    let mut r = vec![];

    for inner in it {
        r.extend(inner);
    }

    r
}

#[cfg(test)]
mod tests {
    use super::flat;

    #[test]
    fn test_flat() -> anyhow::Result<()> {
        let a: Vec<Vec<i32>> = vec![vec![1, 2], vec![3], vec![], vec![4, 5]];

        let r = flat(a);

        let expected = vec![1, 2, 3, 4, 5];

        assert_eq!(expected, r);

        Ok(())
    }
}
