macro_rules! cases {
    [$(($id:expr, $class:expr, $method:expr)),* $(,)?] => {
        vec![$($crate::case::TestCase::new($id as u64, $class, $method)),*]
    };
}

pub(crate) use cases;

macro_rules! request {
    [$($id:expr),* $(,)?] => {
        [$($id as u64),*]
            .into_iter()
            .map($crate::case::CaseId)
            .collect::<$crate::plan::PlanRequest>()
    };
}

pub(crate) use request;
