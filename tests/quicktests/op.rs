use quickcheck::{Arbitrary, Gen};

/// The operations a quicktest can apply to a tree.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    Insert(T),
    Remove(T),
    RotateLeft(T),
    RotateRight(T),
}

impl<T: Arbitrary> Arbitrary for Op<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::RotateLeft(T::arbitrary(g)),
            3 => Op::RotateRight(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Insert(x) => Box::new(x.shrink().map(Op::Insert)),
            Op::Remove(x) => Box::new(x.shrink().map(Op::Remove)),
            Op::RotateLeft(x) => Box::new(x.shrink().map(Op::RotateLeft)),
            Op::RotateRight(x) => Box::new(x.shrink().map(Op::RotateRight)),
        }
    }
}
