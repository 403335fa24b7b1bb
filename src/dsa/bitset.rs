// fixed length bit set, every bit starts cleared
#[derive(Clone,Debug)]
pub(crate) struct BitSet {
    size:usize,
    bytes:Vec<u8>
}

impl BitSet {
    pub(crate) fn with_len(len:usize) -> Self {
        Self {
            size:len,
            bytes:vec![0;len.div_ceil(8)]
        }
    }
    pub(crate) fn len(&self) -> usize {
        self.size
    }
    pub(crate) fn get_at(&self,index:usize) -> Option<bool> {
        if index >= self.size {return None}
        let byte_pos = index / 8;
        let pos_in_byte = index % 8;
        let byte = self.bytes.get(byte_pos)?;
        let mask = 1u8 << pos_in_byte;
        Some(*byte & mask > 0)
    }
    pub(crate) fn store_at(&mut self,index:usize,bit:bool) -> Option<()> {
        if index >= self.size {return None}
        let byte_pos = index / 8;
        let pos_in_byte = index % 8;
        let byte = self.bytes.get_mut(byte_pos)?;
        let mask = 1u8 << pos_in_byte;
        if bit {
            *byte |= mask;
        }else{
            *byte &= !mask;
        }
        Some(())
    }
    // true if the bit was clear before, like HashSet::insert
    pub(crate) fn insert(&mut self,index:usize) -> bool {
        match self.get_at(index) {
            Some(false) => self.store_at(index, true).is_some(),
            _ => false
        }
    }
    pub(crate) fn clear(&mut self) {
        self.bytes.fill(0);
    }
    pub(crate) fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(|i| self.get_at(*i) == Some(true))
    }
}
