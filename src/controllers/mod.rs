pub mod mandelbrot_session;
