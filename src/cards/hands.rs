use super::hand::Hand;

/// HandIterator visits every n-card Hand that avoids a blocked mask.
///
/// It holds only the current bitstring and the mask, stepping to the next
/// bitstring with the same popcount in increasing numeric order. Exhaustive
/// runouts and opponent holdings are enumerated this way without ever
/// materializing the combinations.
pub struct HandIterator {
    next: u64,
    mask: u64,
    size: usize,
    blank: bool,
}

impl HandIterator {
    /// C(52 - |mask|, n), the total this iterator yields from the start.
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = self.size;
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || (64 - 52) > self.next.leading_zeros()
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.blank {
            self.blank = false;
            Some(Hand::empty())
        } else if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction.
/// choosing zero cards yields the empty Hand exactly once
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1u64 << n) - 1,
            mask: u64::from(mask),
            size: n,
            blank: n == 0,
        };
        while this.next & this.mask > 0 && !this.exhausted() {
            this.next = this.permute();
        }
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::empty()));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
        assert!(iter.next() == Some(Hand::from(0b10101)));
        assert!(iter.next() == Some(Hand::from(0b10110)));
        assert!(iter.next() == Some(Hand::from(0b11001)));
        assert!(iter.next() == Some(Hand::from(0b11010)));
        assert!(iter.next() == Some(Hand::from(0b11100)));
    }

    #[test]
    fn blocked_cards_skipped() {
        let mask = Hand::from(0b______________________11_0);
        let mut iter = HandIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1001_00_1)));
    }

    #[test]
    fn choose_zero_yields_empty_once() {
        let mut iter = HandIterator::from((0, Hand::from(0b111)));
        assert_eq!(iter.next(), Some(Hand::empty()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn counts_match_combinations() {
        let mask = Hand::try_from("As Kd 7h 8h 9h").unwrap();
        let iter = HandIterator::from((2, mask));
        assert_eq!(iter.combinations(), 47 * 46 / 2);
        assert_eq!(iter.count(), 47 * 46 / 2);
    }

    #[test]
    fn never_touches_mask() {
        let mask = Hand::try_from("As Kd 7h 8h").unwrap();
        assert!(HandIterator::from((1, mask)).all(|h| u64::from(h) & u64::from(mask) == 0));
        assert_eq!(HandIterator::from((1, mask)).count(), 48);
    }
}
