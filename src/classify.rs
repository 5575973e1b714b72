use common::Segment;

pub const SHORT_LIMIT: f64 = 100.0;
pub const MEDIUM_LIMIT: f64 = 200.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bucket {
    Short,
    Medium,
    Long,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Short, Bucket::Medium, Bucket::Long];

    /// Lower bound of each bucket is inclusive.
    pub fn of_length(length: f64) -> Bucket {
        if length < SHORT_LIMIT {
            Bucket::Short
        } else if length < MEDIUM_LIMIT {
            Bucket::Medium
        } else {
            Bucket::Long
        }
    }

    pub fn of_segment(segment: &Segment) -> Bucket {
        Bucket::of_length(segment.length())
    }

    pub fn label(&self) -> &'static str {
        match self {
            &Bucket::Short => "short",
            &Bucket::Medium => "medium",
            &Bucket::Long => "long",
        }
    }

    pub fn color(&self) -> [f32; 4] {
        match self {
            &Bucket::Short => [0.0, 0.5, 0.0, 1.0],
            &Bucket::Medium => [0.0, 0.0, 1.0, 1.0],
            &Bucket::Long => [1.0, 0.0, 0.0, 1.0],
        }
    }

    fn slot(&self) -> usize {
        match self {
            &Bucket::Short => 0,
            &Bucket::Medium => 1,
            &Bucket::Long => 2,
        }
    }
}

/// Segments grouped by bucket, stored as indices into the classified slice.
#[derive(Clone, PartialEq, Debug)]
pub struct Classification {
    members: [Vec<usize>; 3],
}

impl Classification {
    pub fn of(segments: &[Segment]) -> Classification {
        let mut members = [Vec::new(), Vec::new(), Vec::new()];
        for (index, segment) in segments.iter().enumerate() {
            members[Bucket::of_segment(segment).slot()].push(index);
        }
        Classification { members, }
    }

    pub fn members(&self, bucket: Bucket) -> &[usize] {
        &self.members[bucket.slot()]
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        self.members(bucket).len()
    }

    pub fn total(&self) -> usize {
        self.members.iter().map(Vec::len).sum()
    }

    pub fn bucket_of(&self, index: usize) -> Option<Bucket> {
        Bucket::ALL.iter()
            .find(|bucket| self.members(**bucket).contains(&index))
            .cloned()
    }

    /// Buckets that hold at least one segment, in display order.
    pub fn occupied(&self) -> Vec<(Bucket, usize)> {
        Bucket::ALL.iter()
            .map(|&bucket| (bucket, self.count(bucket)))
            .filter(|&(_, count)| count > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{self, Rng};
    use common::Segment;
    use super::{Bucket, Classification};

    #[test]
    fn thresholds() {
        assert_eq!(Bucket::of_length(0.), Bucket::Short);
        assert_eq!(Bucket::of_length(99.999), Bucket::Short);
        assert_eq!(Bucket::of_length(100.), Bucket::Medium);
        assert_eq!(Bucket::of_length(199.999), Bucket::Medium);
        assert_eq!(Bucket::of_length(200.), Bucket::Long);
        assert_eq!(Bucket::of_length(1e9), Bucket::Long);
    }

    #[test]
    fn reference_lines() {
        assert_eq!(Bucket::of_segment(&Segment::new(0., 0., 300., 0.)), Bucket::Long);
        assert_eq!(Bucket::of_segment(&Segment::new(0., 0., 50., 0.)), Bucket::Short);
        assert_eq!(Bucket::of_segment(&Segment::new(0., 0., 150., 0.)), Bucket::Medium);
    }

    #[test]
    fn members_keep_input_order() {
        let segments = vec![
            Segment::new(0., 0., 300., 0.),
            Segment::new(0., 0., 50., 0.),
            Segment::new(0., 0., 150., 0.),
            Segment::new(0., 0., 0., 10.),
            Segment::new(0., 0., 0., 250.),
        ];
        let classification = Classification::of(&segments);
        assert_eq!(classification.members(Bucket::Short), &[1, 3]);
        assert_eq!(classification.members(Bucket::Medium), &[2]);
        assert_eq!(classification.members(Bucket::Long), &[0, 4]);
        assert_eq!(classification.bucket_of(2), Some(Bucket::Medium));
        assert_eq!(classification.bucket_of(5), None);
    }

    #[test]
    fn occupied_skips_empty_buckets() {
        let segments = vec![Segment::new(0., 0., 300., 0.), Segment::new(0., 0., 5., 0.)];
        let classification = Classification::of(&segments);
        assert_eq!(classification.occupied(), vec![(Bucket::Short, 1), (Bucket::Long, 1)]);
        assert!(Classification::of(&[]).occupied().is_empty());
    }

    #[test]
    fn assignment_is_total_exclusive_and_idempotent() {
        let mut rng = rand::thread_rng();
        let segments: Vec<_> = (0 .. 500)
            .map(|_| Segment::new(
                rng.gen_range(0., 500.),
                rng.gen_range(0., 400.),
                rng.gen_range(0., 500.),
                rng.gen_range(0., 400.),
            ))
            .collect();
        let classification = Classification::of(&segments);
        assert_eq!(classification.total(), segments.len());
        for (index, segment) in segments.iter().enumerate() {
            let holders = Bucket::ALL.iter()
                .filter(|bucket| classification.members(**bucket).contains(&index))
                .count();
            assert_eq!(holders, 1);
            assert_eq!(classification.bucket_of(index), Some(Bucket::of_segment(segment)));
        }
        assert_eq!(Classification::of(&segments), classification);
    }
}
