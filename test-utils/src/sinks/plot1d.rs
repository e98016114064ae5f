use gnuplot::PlotOption::LineWidth;
use gnuplot::{AxesCommon, Caption, Color, Figure};
use log::error;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use common::types::{DerivedSample, SampleField};

const COLORS: [&str; 6] = ["blue", "green", "red", "orange", "purple", "black"];

struct PlotManager {
    figure: Figure,
    fields: Vec<SampleField>,
    t_vals: VecDeque<f64>,
    values: Vec<VecDeque<f64>>,
    window_size: usize,
    tag: String,
}

impl PlotManager {
    fn new(tag: &str, fields: Vec<SampleField>, window_size: usize) -> Self {
        let values = fields.iter().map(|_| VecDeque::new()).collect();
        Self {
            figure: Figure::new(),
            fields,
            t_vals: VecDeque::new(),
            values,
            window_size,
            tag: tag.to_string(),
        }
    }

    fn add_sample(&mut self, sample: &DerivedSample) {
        if self.t_vals.len() == self.window_size {
            self.t_vals.pop_front();
            self.values.iter_mut().for_each(|series| {
                series.pop_front();
            });
        }
        self.t_vals.push_back(sample.get_timestamp());
        for (field, series) in self.fields.iter().zip(self.values.iter_mut()) {
            series.push_back(field.value_of(sample));
        }
    }

    fn update(&mut self) {
        self.figure.clear_axes();
        let axes = self.figure.axes2d();
        axes.set_title(&self.tag, &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.set_y_label("Value", &[]);

        for (idx, (field, series)) in self.fields.iter().zip(self.values.iter()).enumerate() {
            axes.lines(
                &self.t_vals,
                series,
                &[
                    Color(COLORS[idx % COLORS.len()]),
                    LineWidth(2.0),
                    Caption(field.column_name()),
                ],
            );
        }

        if let Err(e) = self.figure.show_and_keep_running() {
            error!("Error refreshing plot {}: {:?}", self.tag, e);
        }
    }
}

/// Live gnuplot chart of the selected fields of the most recent `window_size` samples.
#[derive(Clone)]
pub struct Plot1D(Arc<Mutex<PlotManager>>);

impl Plot1D {
    pub fn new(tag: &str, fields: Vec<SampleField>, window_size: usize) -> Self {
        Self(Arc::new(Mutex::new(PlotManager::new(
            tag,
            fields,
            window_size.max(1),
        ))))
    }

    /// Redraws the chart every `refresh_period_millis` from a background thread.
    pub fn start(&self, refresh_period_millis: u64) {
        let plot_manager = Arc::clone(&self.0);
        thread::spawn(move || {
            let period = Duration::from_millis(refresh_period_millis);
            loop {
                let start_time = Instant::now();
                plot_manager.lock().unwrap().update();

                let elapsed_time = start_time.elapsed();
                thread::sleep(period.saturating_sub(elapsed_time));
            }
        });
    }

    pub fn add_sample(&self, sample: &DerivedSample) {
        self.0.lock().unwrap().add_sample(sample);
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().t_vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
